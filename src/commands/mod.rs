pub mod key_save;
pub mod keygen;
pub mod verify;
