pub mod booking;
pub mod image;
pub mod travel_package;
pub mod user;
pub mod video;

pub use booking::{Booking, CreateBookingPayload};
pub use image::UploadedImage;
pub use travel_package::{CreateTravelPackagePayload, TravelPackage, UpdateTravelPackagePayload};
pub use user::{CreateUserPayload, LoginResponse, PaginatedUsers, UpdateUserPayload, User};
pub use video::{CourseGroup, CreateVideoPayload, Video, VideoGroup};
