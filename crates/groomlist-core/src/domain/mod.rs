pub mod contact;
pub mod name;
pub mod pet_id;
pub mod phone;

pub use contact::Contact;
pub use name::clean_name;
pub use pet_id::{find_pet_id, scan_pet_id, PetId};
pub use phone::{find_phone, format_phone, scan_phone};
