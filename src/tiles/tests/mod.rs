mod layout_tests;
mod job_tests;
