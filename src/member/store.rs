use crate::member::error::Error;
use crate::member::{Member, Result};
use dto::member_update::MemberUpdateDto;
use dto::new_member::NewMemberDto;

/// In-memory list of members for a single family.
/// Ids start at 1 and are never reused, even after a deletion.
pub struct FamilyStore {
    surname: String,
    next_id: u32,
    members: Vec<Member>,
}

impl FamilyStore {
    pub fn new(surname: String) -> Self {
        Self {
            surname,
            next_id: 1,
            members: vec![],
        }
    }

    /// All members, in insertion order.
    pub fn get_all_members(&self) -> &[Member] {
        &self.members
    }

    pub fn get_member(&self, id: u32) -> Option<&Member> {
        self.members.iter().find(|member| *member.id() == id)
    }

    /// Append a new member and return its id.
    /// `last_name` falls back to the family surname when not provided.
    pub fn add_member(&mut self, new_member: NewMemberDto) -> Result<u32> {
        if new_member.first_name().trim().is_empty() {
            return Err(Error::MissingField("first_name"));
        }

        let id = self.next_id;
        self.next_id += 1;

        let last_name = new_member
            .last_name()
            .clone()
            .unwrap_or_else(|| self.surname.clone());
        self.members.push(Member::new(
            id,
            new_member.first_name().clone(),
            last_name,
            *new_member.age(),
            new_member.lucky_numbers().clone(),
        ));

        Ok(id)
    }

    /// Replace the fields present in the update and keep the others.
    /// Returns false when no member matches the id.
    pub fn update_member(&mut self, id: u32, update: &MemberUpdateDto) -> bool {
        let Some(member) = self.members.iter_mut().find(|member| *member.id() == id) else {
            return false;
        };

        if let Some(first_name) = update.first_name() {
            member.first_name = first_name.clone();
        }
        if let Some(last_name) = update.last_name() {
            member.last_name = last_name.clone();
        }
        if let Some(age) = update.age() {
            member.age = *age;
        }
        if let Some(lucky_numbers) = update.lucky_numbers() {
            member.lucky_numbers = lucky_numbers.clone();
        }

        true
    }

    /// Remove the member matching the id.
    pub fn delete_member(&mut self, id: u32) -> Result<()> {
        let position = self
            .members
            .iter()
            .position(|member| *member.id() == id)
            .ok_or(Error::NoSuchMember(id))?;
        self.members.remove(position);

        Ok(())
    }
}
