use sqlx::SqlitePool;

use crate::database::activity_participants_repo;

const SQL_CREATE_ACTIVITIES: &str = r#"
CREATE TABLE IF NOT EXISTS activities (
  name TEXT PRIMARY KEY,
  description TEXT NOT NULL,
  schedule TEXT NOT NULL,
  max_participants INTEGER NOT NULL
)
"#;

const SQL_CREATE_PARTICIPANTS: &str = r#"
CREATE TABLE IF NOT EXISTS activity_participants (
  activity_name TEXT NOT NULL REFERENCES activities(name),
  email TEXT NOT NULL,
  UNIQUE (activity_name, email)
)
"#;

const SQL_INSERT_ACTIVITY: &str = r#"
INSERT INTO activities (
  name,
  description,
  schedule,
  max_participants
) VALUES (?, ?, ?, ?)
"#;

struct SeedActivity {
    name: &'static str,
    description: &'static str,
    schedule: &'static str,
    max_participants: i64,
    participants: &'static [&'static str],
}

// Fixed catalog, loaded once per process start. Activities are never
// created or deleted at runtime; only the rosters change.
const SEED_ACTIVITIES: &[SeedActivity] = &[
    SeedActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    SeedActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    SeedActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
    SeedActivity {
        name: "Basketball",
        description: "Practice drills and play matches against other schools",
        schedule: "Wednesdays, 4:00 PM - 5:30 PM",
        max_participants: 15,
        participants: &["james@mergington.edu", "lucas@mergington.edu"],
    },
    SeedActivity {
        name: "Tennis Club",
        description: "Weekly tennis training for all skill levels",
        schedule: "Thursdays, 3:30 PM - 5:00 PM",
        max_participants: 10,
        participants: &["mia@mergington.edu"],
    },
    SeedActivity {
        name: "Debate Team",
        description: "Prepare for and compete in regional debate tournaments",
        schedule: "Tuesdays, 4:00 PM - 5:30 PM",
        max_participants: 12,
        participants: &["alex@mergington.edu", "ryan@mergington.edu"],
    },
    SeedActivity {
        name: "Science Club",
        description: "Hands-on experiments and science fair projects",
        schedule: "Wednesdays, 3:30 PM - 5:00 PM",
        max_participants: 16,
        participants: &["isabella@mergington.edu"],
    },
];

/// Create the registry tables and load the seed catalog.
pub async fn prepare(pool: &SqlitePool) -> sqlx::Result<()> {
    sqlx::query(SQL_CREATE_ACTIVITIES).execute(pool).await?;
    sqlx::query(SQL_CREATE_PARTICIPANTS).execute(pool).await?;

    for activity in SEED_ACTIVITIES {
        sqlx::query(SQL_INSERT_ACTIVITY)
            .bind(activity.name)
            .bind(activity.description)
            .bind(activity.schedule)
            .bind(activity.max_participants)
            .execute(pool)
            .await?;

        for email in activity.participants {
            activity_participants_repo::insert_participant(pool, activity.name, email).await?;
        }
    }

    Ok(())
}
