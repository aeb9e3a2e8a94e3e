pub mod survey_repository;
