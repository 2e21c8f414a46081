// Autocomplete widget family
//
// Combobox (single value), ChipList (committed tokens) and ChipCombobox
// (multi-select built from the two). State and key handling live in the
// plain modules; each `*_widget` module draws its state with ratatui.

mod chip_combobox;
mod chip_combobox_widget;
mod chip_list;
mod chip_list_widget;
mod combobox;
mod combobox_widget;
mod event;
mod flash;
pub mod text;

pub use chip_combobox::ChipCombobox;
pub use chip_combobox_widget::ChipComboboxWidget;
pub use chip_list::{ChipAdd, ChipList};
pub use chip_list_widget::ChipListWidget;
pub use combobox::Combobox;
pub use combobox_widget::ComboboxWidget;
pub use event::{Reply, SelectFlavor, WidgetEvent};
pub use flash::{Flash, FlashExpired, FlashTimer};
