use chrono::NaiveDate;
use logtrack_core::models::logbook::CountFilter;
use mockall::mock;
use uuid::Uuid;

use crate::models::{DbDailyLog, DbLogbook, DbMember};

// Mock repositories for testing
mock! {
    pub MemberRepo {
        pub async fn create_member(
            &self,
            name: &'static str,
            email: &'static str,
            password_hash: &'static str,
            department: &'static str,
            role: &'static str,
        ) -> eyre::Result<DbMember>;

        pub async fn get_member_by_email(
            &self,
            email: &'static str,
        ) -> eyre::Result<Option<DbMember>>;

        pub async fn get_member_by_email_and_department(
            &self,
            email: &'static str,
            department: &'static str,
        ) -> eyre::Result<Option<DbMember>>;
    }
}

mock! {
    pub DailyLogRepo {
        pub async fn create_daily_log(
            &self,
            student_id: Uuid,
            day: &'static str,
            date: NaiveDate,
            week_number: i32,
            description_of_work: &'static str,
            skills_learnt: &'static str,
        ) -> eyre::Result<DbDailyLog>;

        pub async fn get_daily_logs_by_student(
            &self,
            student_id: Uuid,
        ) -> eyre::Result<Vec<DbDailyLog>>;

        pub async fn get_daily_log_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbDailyLog>>;

        pub async fn update_daily_log(
            &self,
            id: Uuid,
            day: &'static str,
            date: NaiveDate,
            week_number: i32,
            description_of_work: &'static str,
            skills_learnt: &'static str,
        ) -> eyre::Result<()>;

        pub async fn delete_daily_log(&self, id: Uuid) -> eyre::Result<()>;
    }
}

mock! {
    pub LogbookRepo {
        pub async fn create_logbook(
            &self,
            student_id: Uuid,
            week_number: i32,
            weekly_summary: &'static str,
            daily_logs: serde_json::Value,
            department: &'static str,
            student_name: &'static str,
            school: &'static str,
        ) -> eyre::Result<DbLogbook>;

        pub async fn get_logbooks_by_student(
            &self,
            student_id: Uuid,
        ) -> eyre::Result<Vec<DbLogbook>>;

        pub async fn get_all_logbooks(&self) -> eyre::Result<Vec<DbLogbook>>;

        pub async fn get_logbook_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbLogbook>>;

        pub async fn count_logbooks(
            &self,
            student_id: Option<Uuid>,
            filter: CountFilter,
        ) -> eyre::Result<i64>;

        pub async fn set_supervisor_comments(
            &self,
            id: Uuid,
            supervisor_comments: Option<&'static str>,
        ) -> eyre::Result<()>;

        pub async fn set_supervisor_phone(
            &self,
            id: Uuid,
            supervisor_phone: Option<&'static str>,
        ) -> eyre::Result<()>;

        pub async fn set_signed_by(
            &self,
            id: Uuid,
            signed_by: Option<&'static str>,
        ) -> eyre::Result<()>;

        pub async fn approve_logbook(&self, id: Uuid) -> eyre::Result<()>;

        pub async fn delete_logbook(&self, id: Uuid) -> eyre::Result<()>;
    }
}
