pub mod coordinate_panel;
pub mod profile_list;
pub mod transfer_dialog;

pub use coordinate_panel::{CoordinateAction, CoordinatePanel};
pub use profile_list::{ProfileAction, ProfileList};
pub use transfer_dialog::{TransferAction, TransferDialog, TransferKind};
