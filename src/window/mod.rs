pub mod chrome;
pub mod instance;

pub use chrome::{ChromeHit, GlassDecorator, WindowButton, WindowDecorator};
pub use instance::{Interaction, WindowInstance};
