// Handlers grouped by route prefix:
//   /common/*  users and (deprecated) babies
//   /models/*  generated images and music
//   /chats/*, /letters/*  placeholders answering 501
//   /, /health  service information
pub mod chats;
pub mod common;
pub mod letters;
pub mod models;
pub mod system;
