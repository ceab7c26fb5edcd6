pub mod staff_users;
