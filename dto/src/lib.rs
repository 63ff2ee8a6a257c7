pub mod member;
pub mod member_update;
pub mod new_member;
