pub mod clockify;
