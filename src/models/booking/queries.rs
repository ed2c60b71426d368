use sqlx::PgPool;

use super::types::{Booking, NewBooking};
use crate::booking::BookingKey;
use crate::store::{BookingStore, StoreError};

const SELECT_BOOKING: &str = "\
    SELECT id, user_id, name, email, section, subject, faculty_name, \
           booking_date AS date, start_time, end_time, students_strength, \
           description, classroom, \
           to_char(created_at, 'YYYY-MM-DD HH24:MI:SS') AS created_at \
    FROM bookings";

pub async fn create(pool: &PgPool, new: &NewBooking) -> Result<i64, sqlx::Error> {
    let id: (i64,) = sqlx::query_as(
        "INSERT INTO bookings \
             (user_id, name, email, section, subject, faculty_name, booking_date, \
              start_time, end_time, students_strength, description, classroom) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
         RETURNING id",
    )
    .bind(new.user_id)
    .bind(&new.name)
    .bind(&new.email)
    .bind(&new.section)
    .bind(&new.subject)
    .bind(&new.faculty_name)
    .bind(&new.date)
    .bind(&new.start_time)
    .bind(&new.end_time)
    .bind(new.students_strength)
    .bind(&new.description)
    .bind(&new.classroom)
    .fetch_one(pool)
    .await?;
    Ok(id.0)
}

pub async fn find_by_key(pool: &PgPool, key: &BookingKey) -> Result<Vec<Booking>, sqlx::Error> {
    let sql = format!(
        "{SELECT_BOOKING} \
         WHERE classroom = $1 AND booking_date = $2 AND start_time = $3 AND end_time = $4"
    );
    sqlx::query_as::<_, Booking>(&sql)
        .bind(&key.classroom)
        .bind(&key.date)
        .bind(&key.start_time)
        .bind(&key.end_time)
        .fetch_all(pool)
        .await
}

pub async fn find_all(pool: &PgPool) -> Result<Vec<Booking>, sqlx::Error> {
    let sql = format!("{SELECT_BOOKING} ORDER BY created_at, id");
    sqlx::query_as::<_, Booking>(&sql).fetch_all(pool).await
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

impl BookingStore for PgPool {
    async fn insert(&self, booking: &NewBooking) -> Result<i64, StoreError> {
        Ok(create(self, booking).await?)
    }

    async fn find_by_key(&self, key: &BookingKey) -> Result<Vec<Booking>, StoreError> {
        Ok(find_by_key(self, key).await?)
    }

    async fn list(&self) -> Result<Vec<Booking>, StoreError> {
        Ok(find_all(self).await?)
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        Ok(delete(self, id).await?)
    }
}
