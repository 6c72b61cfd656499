pub mod observation;
pub mod report_month;
pub mod weather_category;
pub mod wind_direction;
