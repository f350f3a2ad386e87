pub mod consumer_preferences;
pub mod customer_feedback;
pub mod stale_logic;

// Re-export consumer_preferences
pub use consumer_preferences::consumer_preferences;

// Re-export customer_feedback
pub use customer_feedback::customer_feedback;

// Re-export stale_logic
pub use stale_logic::stale_logic;
