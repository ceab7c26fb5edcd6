pub mod educations;
pub mod education_translations;
pub mod experiences;
pub mod experience_translations;
pub mod hobbies;
pub mod hobby_translations;
pub mod projects;
pub mod project_translations;
pub mod skills;
pub mod skill_translations;
