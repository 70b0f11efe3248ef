pub mod alert;
pub mod confirm_quit;
pub mod keygen;

pub use alert::AlertScreen;
pub use confirm_quit::ConfirmQuitScreen;
pub use keygen::KeygenScreen;
