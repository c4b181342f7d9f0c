pub mod collection;
pub mod facts;
pub mod favorites;
pub mod home;
pub mod levels;
pub mod loader;
pub mod onboarding;
pub mod play;
