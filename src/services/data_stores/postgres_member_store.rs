use color_eyre::eyre::eyre;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::{
    Balance, Email, FirstName, LastName, Member, MemberId, MemberStore,
    MemberStoreError, NewMember, PhoneNumber, ValidationError,
};

pub struct PostgresMemberStore {
    pool: PgPool,
}

impl PostgresMemberStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct MemberRow {
    id: uuid::Uuid,
    first_name: String,
    last_name: String,
    email: String,
    phone_number: Option<String>,
    balance: Decimal,
}

impl TryFrom<MemberRow> for Member {
    type Error = MemberStoreError;

    fn try_from(row: MemberRow) -> Result<Self, Self::Error> {
        let unexpected =
            |e: ValidationError| MemberStoreError::UnexpectedError(eyre!(e));
        Ok(Member {
            id: MemberId::new(row.id),
            first_name: FirstName::parse(row.first_name).map_err(unexpected)?,
            last_name: LastName::parse(row.last_name).map_err(unexpected)?,
            email: Email::parse(row.email).map_err(unexpected)?,
            phone_number: PhoneNumber::parse(row.phone_number)
                .map_err(unexpected)?,
            balance: Balance::parse(row.balance).map_err(unexpected)?,
        })
    }
}

fn map_write_error(e: sqlx::Error) -> MemberStoreError {
    match e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            MemberStoreError::MemberAlreadyExists
        }
        err => MemberStoreError::UnexpectedError(eyre!(err)),
    }
}

#[async_trait::async_trait]
impl MemberStore for PostgresMemberStore {
    #[tracing::instrument(name = "Adding member to PostgreSQL", skip_all)]
    async fn add_member(
        &mut self,
        member: NewMember,
    ) -> Result<Member, MemberStoreError> {
        let row = sqlx::query_as::<_, MemberRow>(
            r#"
            INSERT INTO members (first_name, last_name, email, phone_number, balance)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, first_name, last_name, email, phone_number, balance
            "#,
        )
        .bind(member.first_name.as_ref())
        .bind(member.last_name.as_ref())
        .bind(member.email.as_ref())
        .bind(member.phone_number.as_ref().map(|p| AsRef::<str>::as_ref(p)))
        .bind(member.balance.as_ref())
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        row.try_into()
    }

    #[tracing::instrument(name = "Retrieving member from PostgreSQL", skip_all)]
    async fn get_member(
        &self,
        id: &MemberId,
    ) -> Result<Member, MemberStoreError> {
        sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT id, first_name, last_name, email, phone_number, balance
            FROM members
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => MemberStoreError::MemberNotFound,
            err => MemberStoreError::UnexpectedError(eyre!(err)),
        })?
        .try_into()
    }

    #[tracing::instrument(name = "Listing members from PostgreSQL", skip_all)]
    async fn list_members(&self) -> Result<Vec<Member>, MemberStoreError> {
        let rows = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT id, first_name, last_name, email, phone_number, balance
            FROM members
            ORDER BY email COLLATE "C"
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| MemberStoreError::UnexpectedError(eyre!(e)))?;

        rows.into_iter().map(Member::try_from).collect()
    }

    #[tracing::instrument(name = "Updating member in PostgreSQL", skip_all)]
    async fn update_member(
        &mut self,
        member: &Member,
    ) -> Result<(), MemberStoreError> {
        let result = sqlx::query(
            r#"
            UPDATE members
            SET first_name = $2, last_name = $3, email = $4, phone_number = $5, balance = $6
            WHERE id = $1
            "#,
        )
        .bind(member.id.as_ref())
        .bind(member.first_name.as_ref())
        .bind(member.last_name.as_ref())
        .bind(member.email.as_ref())
        .bind(member.phone_number.as_ref().map(|p| AsRef::<str>::as_ref(p)))
        .bind(member.balance.as_ref())
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            return Err(MemberStoreError::MemberNotFound);
        }

        Ok(())
    }

    #[tracing::instrument(name = "Deleting member from PostgreSQL", skip_all)]
    async fn delete_member(
        &mut self,
        id: &MemberId,
    ) -> Result<(), MemberStoreError> {
        let result = sqlx::query(
            r#"
            DELETE FROM members WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .execute(&self.pool)
        .await
        .map_err(|e| MemberStoreError::UnexpectedError(eyre!(e)))?;

        if result.rows_affected() == 0 {
            return Err(MemberStoreError::MemberNotFound);
        }

        Ok(())
    }
}
