mod rate_user;
mod respond_to_rating;

pub use rate_user::RateUserCommandHandler;
pub use respond_to_rating::RespondToRatingCommandHandler;
