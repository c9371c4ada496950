pub mod dashboard_cards;
pub mod empty_state;
pub mod employee_table;
pub mod filter_input;
pub mod form_popup;
pub mod help_bar;
pub mod help_popup;
pub mod leave_table;
pub mod loading_indicator;
pub mod notice;
pub mod popup;
pub mod screen_title;
pub mod status_badge;
pub mod status_chart;
