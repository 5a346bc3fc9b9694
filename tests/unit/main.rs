mod application;
mod presentation;
