pub mod icon_input;
pub mod scenario;
