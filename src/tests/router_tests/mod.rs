mod booking_tests;
mod page_tests;
mod video_tests;
