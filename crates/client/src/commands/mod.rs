mod inspect;
mod play;
mod train;

pub use inspect::InspectCommand;
pub use play::PlayCommand;
pub use train::TrainCommand;
