mod calendar_test;
mod middleware_test;
mod shift_template_test;
mod user_test;
