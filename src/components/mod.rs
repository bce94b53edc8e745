// Shared components drawn by screens

pub mod footer;

pub use footer::Footer;
