//! Text renderings of the form.

mod tax_form;

pub use tax_form::TaxFormView;

pub const TITLE: &str = "消費税計算アプリ";

/// Commands understood by the interactive form.
pub const HELP: &str = "\
<text>        set the price field
:calc         calculate (an empty line does the same)
:clear        empty the price field
:rate <RATE>  select 10% or 8%
:ok           dismiss the error
:show         redraw the form
:help         show this help
:quit         leave";
