//! `yunetas venv` handlers.
//!
//! Only acknowledge the request; no environment is created or removed.

pub fn create(name: &str) {
    println!("Creating venv: {}", name);
}

pub fn delete(name: &str) {
    println!("Deleting venv: {}", name);
}
