mod booking_repo;
mod cabin_repo;
mod guest_repo;
mod session_repo;
mod settings_repo;

pub use booking_repo::BookingRepo;
pub use cabin_repo::CabinRepo;
pub use guest_repo::GuestRepo;
pub use session_repo::SessionRepo;
pub use settings_repo::SettingsRepo;
