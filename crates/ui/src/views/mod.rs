mod exercise;
mod lesson;
mod not_found;
mod state;
mod unit_map;
mod unit_overview;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use exercise::ExerciseView;
pub use lesson::LessonView;
pub use not_found::NotFoundView;
pub use state::ViewError;
pub use unit_map::UnitMapView;
pub use unit_overview::UnitOverviewView;
