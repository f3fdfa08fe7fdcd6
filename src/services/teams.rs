//! Teams, members and departments service

use validator::Validate;

use crate::{
    error::{AppError, AppResult, Entity},
    models::{
        team::{CreateTeam, CreateTeamMember, TeamSummary, UpdateTeam},
        Department, Team, TeamMember,
    },
    store::SharedStore,
    views::dashboard::team_summary,
};

#[derive(Clone)]
pub struct TeamsService {
    store: SharedStore,
}

impl TeamsService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    // ---- Teams ----

    /// Team cards with members and request counts
    pub async fn list(&self) -> Vec<TeamSummary> {
        let store = self.store.read().await;
        let (members, requests) = (store.team_members(), store.requests());
        store
            .teams()
            .iter()
            .map(|t| team_summary(t, &members, &requests))
            .collect()
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<TeamSummary> {
        let store = self.store.read().await;
        let team = store
            .team_by_id(id)
            .ok_or_else(|| AppError::not_found(Entity::Team, id))?;
        Ok(team_summary(team, &store.team_members(), &store.requests()))
    }

    pub async fn create(&self, data: CreateTeam) -> AppResult<Team> {
        data.validate()?;
        let team = self.store.write().await.add_team(data);
        tracing::info!("Created team {} ({})", team.id, team.name);
        Ok(team)
    }

    pub async fn update(&self, id: &str, data: &UpdateTeam) -> AppResult<Team> {
        let team = self
            .store
            .write()
            .await
            .update_team(id, data)
            .ok_or_else(|| AppError::not_found(Entity::Team, id))?;
        tracing::debug!("Updated team {}", id);
        Ok(team)
    }

    // ---- Members ----

    pub async fn list_members(&self) -> Vec<TeamMember> {
        self.store.read().await.team_members().to_vec()
    }

    pub async fn members_of(&self, team_id: &str) -> Vec<TeamMember> {
        self.store.read().await.team_members_for_team(team_id)
    }

    pub async fn get_member(&self, id: &str) -> AppResult<TeamMember> {
        self.store
            .read()
            .await
            .team_member_by_id(id)
            .cloned()
            .ok_or_else(|| AppError::not_found(Entity::TeamMember, id))
    }

    pub async fn add_member(&self, data: CreateTeamMember) -> AppResult<TeamMember> {
        data.validate()?;
        let member = self.store.write().await.add_team_member(data);
        tracing::info!("Added {} to team {}", member.name, member.team_id);
        Ok(member)
    }

    // ---- Departments ----

    pub async fn departments(&self) -> Vec<Department> {
        self.store.read().await.departments().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::*;

    fn service() -> TeamsService {
        TeamsService::new(store_with_team().into_shared())
    }

    #[tokio::test]
    async fn test_team_lifecycle() {
        let service = service();
        let team = service
            .create(CreateTeam {
                name: "Fleet".to_string(),
                description: None,
                color: "#10b981".to_string(),
            })
            .await
            .unwrap();

        let renamed = service
            .update(
                &team.id,
                &UpdateTeam {
                    name: Some("Fleet & Forklifts".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(renamed.name, "Fleet & Forklifts");
        assert_eq!(service.list().await.len(), 2);
        assert_eq!(service.get_by_id(&team.id).await.unwrap().team, renamed);
    }

    #[tokio::test]
    async fn test_team_name_is_required() {
        let service = service();
        let result = service
            .create(CreateTeam {
                name: String::new(),
                description: None,
                color: "#000000".to_string(),
            })
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(matches!(
            service.update("team-x", &UpdateTeam::default()).await,
            Err(AppError::NotFound(Entity::Team, _))
        ));
    }

    #[tokio::test]
    async fn test_members() {
        let service = service();
        let alice = service.add_member(member("T1", "Alice")).await.unwrap();

        assert_eq!(service.members_of("T1").await, vec![alice.clone()]);
        assert_eq!(service.get_member(&alice.id).await.unwrap(), alice);
        assert_eq!(service.list_members().await.len(), 1);
        assert_eq!(service.get_by_id("T1").await.unwrap().members.len(), 1);
        assert!(service.get_member("user-x").await.is_err());
    }

    #[tokio::test]
    async fn test_member_email_must_be_valid() {
        let service = service();
        let mut data = member("T1", "Bob");
        data.email = "not-an-email".to_string();
        assert!(matches!(
            service.add_member(data).await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_departments() {
        let departments = service().departments().await;
        assert_eq!(departments.len(), 1);
        assert_eq!(departments[0].name, "Production");
    }
}
