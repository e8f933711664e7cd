// State management module
// Each service owns its state instance; handlers receive it via axum's
// State extractor rather than through process-wide globals.

pub mod login_log;
pub mod months;
pub mod people;

pub use login_log::{LoginLog, LoginRecord};
pub use months::month_name;
pub use people::{PeopleDirectory, Person};
