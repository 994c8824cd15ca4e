use std::fmt;

use consumption_tax_core::{FormState, TaxRate};

use super::TITLE;

/// Width of the right-aligned value column.
const VALUE_WIDTH: usize = 20;

/// Renders a [`FormState`] the way the single-screen form lays it out.
pub struct TaxFormView<'a> {
    state: &'a FormState,
}

impl<'a> TaxFormView<'a> {
    pub fn new(state: &'a FormState) -> Self {
        Self { state }
    }

    fn rate_picker(&self) -> String {
        TaxRate::all()
            .iter()
            .map(|rate| {
                let mark = if *rate == self.state.rate() { 'x' } else { ' ' };
                format!("({mark}) {rate}")
            })
            .collect::<Vec<_>>()
            .join("  ")
    }
}

impl fmt::Display for TaxFormView<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let display = self.state.display();

        writeln!(f, "{TITLE}")?;
        writeln!(f, "税率　　　：{}", self.rate_picker())?;
        writeln!(
            f,
            "金額　　　：{:>VALUE_WIDTH$} 円",
            display.amount_display
        )?;
        write!(
            f,
            "消費税込み：{:>VALUE_WIDTH$} 円",
            display.tax_inclusive_display
        )?;
        if let Some(error) = &display.error {
            write!(f, "\nエラー　　：{} (:ok)", error.message)?;
        }
        Ok(())
    }
}
