pub mod behavior {
    pub use evolife_core::behavior::*;
}
pub mod config {
    pub use evolife_core::config::*;
}
pub mod error {
    pub use evolife_core::error::*;
}
pub mod genetics {
    pub use evolife_core::genetics::*;
}
pub mod lifecycle {
    pub use evolife_core::lifecycle::*;
}
pub mod params {
    pub use evolife_core::params::*;
}
pub mod state {
    pub use evolife_data::*;
}

pub mod simulation;
