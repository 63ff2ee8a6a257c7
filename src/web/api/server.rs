use crate::member::store::FamilyStore;
use crate::web::api::members_controller;
use crate::web::server::Server;
use dto::new_member::NewMemberDto;
use rocket::{Build, Rocket};
use std::sync::Mutex;

const FAMILY_SURNAME: &str = "Jackson";

pub struct ApiServer {}

impl ApiServer {
    pub fn new() -> Self {
        Self {}
    }
}

impl Server for ApiServer {
    fn configure(&self, rocket_build: Rocket<Build>) -> Rocket<Build> {
        let family_store = build_family_store();

        rocket_build.manage(Mutex::new(family_store)).mount(
            "/",
            routes![
                members_controller::get_all_members,
                members_controller::get_member,
                members_controller::add_member,
                members_controller::update_member,
                members_controller::delete_member,
            ],
        )
    }
}

/// Build the store every instance of the app starts with.
fn build_family_store() -> FamilyStore {
    let mut family_store = FamilyStore::new(FAMILY_SURNAME.to_owned());
    let initial_members = [
        NewMemberDto::new("John".to_owned(), None, 33, vec![7, 13, 22]),
        NewMemberDto::new("Jane".to_owned(), None, 35, vec![10, 14, 3]),
        NewMemberDto::new("Jimmy".to_owned(), None, 5, vec![1]),
    ];
    for member in initial_members {
        if let Err(error) = family_store.add_member(member) {
            error!("{error:#?}");
            panic!("Initialization failed, aborting.");
        }
    }

    family_store
}
