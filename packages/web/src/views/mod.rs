mod login;
mod register;
mod student_add;
mod student_edit;
mod students;
mod tasks;

pub use login::Login;
pub use register::Register;
pub use student_add::StudentAdd;
pub use student_edit::StudentEdit;
pub use students::Students;
pub use tasks::Tasks;
