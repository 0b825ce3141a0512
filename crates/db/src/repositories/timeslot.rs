use crate::models::DbTimeslot;
use clinic_core::models::timeslot::{NewTimeslot, Timeslot, TimeslotUpdate};
use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::debug;

pub async fn list_timeslots(pool: &Pool<Postgres>) -> Result<Vec<Timeslot>> {
    let rows = sqlx::query_as::<_, DbTimeslot>(
        r#"
        SELECT timeslotid, date, starttime, endtime, doctorid, available
        FROM DoctorTimeSlots
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Timeslot::from).collect())
}

pub async fn create_timeslot(pool: &Pool<Postgres>, timeslot: &NewTimeslot) -> Result<Timeslot> {
    let row = sqlx::query_as::<_, DbTimeslot>(
        r#"
        INSERT INTO DoctorTimeSlots (date, starttime, endtime, doctorid)
        VALUES ($1, $2, $3, $4)
        RETURNING timeslotid, date, starttime, endtime, doctorid, available
        "#,
    )
    .bind(timeslot.date)
    .bind(timeslot.starttime)
    .bind(timeslot.endtime)
    .bind(timeslot.doctorid)
    .fetch_one(pool)
    .await?;

    Ok(row.into())
}

/// Overwrites every mutable column of the timeslot. Returns `None` when no
/// row carries the given id.
pub async fn update_timeslot(
    pool: &Pool<Postgres>,
    timeslot_id: i32,
    update: &TimeslotUpdate,
) -> Result<Option<Timeslot>> {
    let row = sqlx::query_as::<_, DbTimeslot>(
        r#"
        UPDATE DoctorTimeSlots
        SET doctorid = $1, date = $2, starttime = $3, endtime = $4, available = $5
        WHERE timeslotid = $6
        RETURNING timeslotid, date, starttime, endtime, doctorid, available
        "#,
    )
    .bind(update.doctorid)
    .bind(update.date)
    .bind(update.starttime)
    .bind(update.endtime)
    .bind(update.available)
    .bind(timeslot_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Timeslot::from))
}

pub async fn delete_timeslot(pool: &Pool<Postgres>, timeslot_id: i32) -> Result<u64> {
    let result = sqlx::query(
        r#"
        DELETE FROM DoctorTimeSlots
        WHERE timeslotid = $1
        "#,
    )
    .bind(timeslot_id)
    .execute(pool)
    .await?;

    debug!(timeslot_id, rows = result.rows_affected(), "deleted timeslot");
    Ok(result.rows_affected())
}
