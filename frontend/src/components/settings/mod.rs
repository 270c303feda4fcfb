pub mod homepage_video;
