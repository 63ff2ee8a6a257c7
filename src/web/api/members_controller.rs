use crate::member::error::Error;
use crate::member::store::FamilyStore;
use crate::tools::{log_error_and_return, log_message_and_return};
use dto::member::MemberDto;
use dto::member_update::MemberUpdateDto;
use dto::new_member::NewMemberDto;
use rocket::State;
use rocket::http::Status;
use rocket::serde::json::Error as JsonError;
use rocket::serde::json::{Json, Value, json};
use std::sync::Mutex;

#[get("/members")]
pub async fn get_all_members(
    family_store: &State<Mutex<FamilyStore>>,
) -> Result<String, Status> {
    let family_store = family_store.lock().map_err(log_message_and_return(
        "Couldn't acquire lock",
        Status::InternalServerError,
    ))?;
    let members = family_store
        .get_all_members()
        .iter()
        .map(MemberDto::from)
        .collect::<Vec<_>>();

    Ok(json!(members).to_string())
}

#[get("/member/<id>")]
pub async fn get_member(
    family_store: &State<Mutex<FamilyStore>>,
    id: u32,
) -> Result<String, Status> {
    let family_store = family_store.lock().map_err(log_message_and_return(
        "Couldn't acquire lock",
        Status::InternalServerError,
    ))?;
    match family_store.get_member(id) {
        Some(member) => Ok(json!(MemberDto::from(member)).to_string()),
        None => Err(Status::NotFound),
    }
}

/// Add a new member to the family.
/// The store assigns the id; a missing `last_name` falls back to the family surname.
#[post("/member", format = "application/json", data = "<new_member>")]
pub async fn add_member(
    family_store: &State<Mutex<FamilyStore>>,
    new_member: Result<Json<NewMemberDto>, JsonError<'_>>,
) -> Result<Value, Status> {
    let new_member = new_member.map_err(log_message_and_return(
        "Invalid new member payload",
        Status::BadRequest,
    ))?;
    let mut family_store = family_store.lock().map_err(log_message_and_return(
        "Couldn't acquire lock",
        Status::InternalServerError,
    ))?;
    match family_store.add_member(new_member.into_inner()) {
        Ok(id) => Ok(json!({"msg": format!("Member has been added. [id: {id}]")})),
        Err(Error::MissingField(field)) => {
            debug!("Can't add member with blank field. [field: {field}]");
            Err(Status::BadRequest)
        }
        Err(error) => {
            error!("{error:#?}");
            Err(Status::InternalServerError)
        }
    }
}

/// Update the fields present in the payload, leaving the others untouched.
#[put("/member/<id>", format = "application/json", data = "<member_update>")]
pub async fn update_member(
    family_store: &State<Mutex<FamilyStore>>,
    id: u32,
    member_update: Result<Json<MemberUpdateDto>, JsonError<'_>>,
) -> Result<Value, Status> {
    let member_update = member_update.map_err(log_message_and_return(
        "Invalid member update payload",
        Status::BadRequest,
    ))?;
    let mut family_store = family_store.lock().map_err(log_message_and_return(
        "Couldn't acquire lock",
        Status::InternalServerError,
    ))?;
    if family_store.update_member(id, &member_update) {
        Ok(json!({"msg": format!("Member has been updated. [id: {id}]")}))
    } else {
        debug!("Can't update unknown member. [id: {id}]");
        Err(Status::NotFound)
    }
}

#[delete("/member/<id>")]
pub async fn delete_member(
    family_store: &State<Mutex<FamilyStore>>,
    id: u32,
) -> Result<Value, Status> {
    let mut family_store = family_store.lock().map_err(log_message_and_return(
        "Couldn't acquire lock",
        Status::InternalServerError,
    ))?;
    family_store
        .delete_member(id)
        .map_err(log_error_and_return(Status::InternalServerError))?;

    Ok(json!({"done": true}))
}
