//! Server functions for the five record collections: the browser-callable
//! CRUD surface, delegating to the record-service client.

use dioxus::prelude::*;
use types::{
    Collection, Course, CourseFields, Enrollment, EnrollmentFields, Instructor, InstructorFields,
    Participant, ParticipantFields, Room, RoomFields,
};

#[post("/api/courses")]
pub async fn list_courses() -> ServerFnResult<Vec<Course>> {
    Ok(server::RECORDS.list(Collection::Courses).await?)
}

#[post("/api/courses/create")]
pub async fn create_course(fields: CourseFields) -> ServerFnResult<Course> {
    Ok(server::RECORDS.create(Collection::Courses, &fields).await?)
}

#[post("/api/courses/update")]
pub async fn update_course(record_id: String, fields: CourseFields) -> ServerFnResult<Course> {
    Ok(server::RECORDS
        .update(Collection::Courses, &record_id, &fields)
        .await?)
}

#[post("/api/courses/delete")]
pub async fn delete_course(record_id: String) -> ServerFnResult<()> {
    Ok(server::RECORDS
        .delete(Collection::Courses, &record_id)
        .await?)
}

#[post("/api/instructors")]
pub async fn list_instructors() -> ServerFnResult<Vec<Instructor>> {
    Ok(server::RECORDS.list(Collection::Instructors).await?)
}

#[post("/api/instructors/create")]
pub async fn create_instructor(fields: InstructorFields) -> ServerFnResult<Instructor> {
    Ok(server::RECORDS
        .create(Collection::Instructors, &fields)
        .await?)
}

#[post("/api/instructors/update")]
pub async fn update_instructor(
    record_id: String,
    fields: InstructorFields,
) -> ServerFnResult<Instructor> {
    Ok(server::RECORDS
        .update(Collection::Instructors, &record_id, &fields)
        .await?)
}

#[post("/api/instructors/delete")]
pub async fn delete_instructor(record_id: String) -> ServerFnResult<()> {
    Ok(server::RECORDS
        .delete(Collection::Instructors, &record_id)
        .await?)
}

#[post("/api/participants")]
pub async fn list_participants() -> ServerFnResult<Vec<Participant>> {
    Ok(server::RECORDS.list(Collection::Participants).await?)
}

#[post("/api/participants/create")]
pub async fn create_participant(fields: ParticipantFields) -> ServerFnResult<Participant> {
    Ok(server::RECORDS
        .create(Collection::Participants, &fields)
        .await?)
}

#[post("/api/participants/update")]
pub async fn update_participant(
    record_id: String,
    fields: ParticipantFields,
) -> ServerFnResult<Participant> {
    Ok(server::RECORDS
        .update(Collection::Participants, &record_id, &fields)
        .await?)
}

#[post("/api/participants/delete")]
pub async fn delete_participant(record_id: String) -> ServerFnResult<()> {
    Ok(server::RECORDS
        .delete(Collection::Participants, &record_id)
        .await?)
}

#[post("/api/rooms")]
pub async fn list_rooms() -> ServerFnResult<Vec<Room>> {
    Ok(server::RECORDS.list(Collection::Rooms).await?)
}

#[post("/api/rooms/create")]
pub async fn create_room(fields: RoomFields) -> ServerFnResult<Room> {
    Ok(server::RECORDS.create(Collection::Rooms, &fields).await?)
}

#[post("/api/rooms/update")]
pub async fn update_room(record_id: String, fields: RoomFields) -> ServerFnResult<Room> {
    Ok(server::RECORDS
        .update(Collection::Rooms, &record_id, &fields)
        .await?)
}

#[post("/api/rooms/delete")]
pub async fn delete_room(record_id: String) -> ServerFnResult<()> {
    Ok(server::RECORDS.delete(Collection::Rooms, &record_id).await?)
}

#[post("/api/enrollments")]
pub async fn list_enrollments() -> ServerFnResult<Vec<Enrollment>> {
    Ok(server::RECORDS.list(Collection::Enrollments).await?)
}

#[post("/api/enrollments/create")]
pub async fn create_enrollment(fields: EnrollmentFields) -> ServerFnResult<Enrollment> {
    Ok(server::RECORDS
        .create(Collection::Enrollments, &fields)
        .await?)
}

#[post("/api/enrollments/update")]
pub async fn update_enrollment(
    record_id: String,
    fields: EnrollmentFields,
) -> ServerFnResult<Enrollment> {
    Ok(server::RECORDS
        .update(Collection::Enrollments, &record_id, &fields)
        .await?)
}

#[post("/api/enrollments/delete")]
pub async fn delete_enrollment(record_id: String) -> ServerFnResult<()> {
    Ok(server::RECORDS
        .delete(Collection::Enrollments, &record_id)
        .await?)
}
