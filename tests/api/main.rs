mod health_check;
mod landing;
mod pages;
mod sign_up;
