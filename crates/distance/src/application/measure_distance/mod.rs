mod measure_distance_command;
mod measure_distance_use_case;

pub use measure_distance_command::MeasureDistanceCommand;
pub use measure_distance_use_case::MeasureDistanceUseCase;
