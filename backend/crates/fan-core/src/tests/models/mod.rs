mod form_step;
mod user_record;
mod verification_status;
