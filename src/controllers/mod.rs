pub mod survey_controller;
