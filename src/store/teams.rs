//! Team and team member operations on MaintenanceStore

use super::{generate_id, merge_fields, rewrite, MaintenanceStore};
use crate::models::{
    team::{CreateTeam, CreateTeamMember, UpdateTeam},
    MaintenanceRequest, Team, TeamMember,
};

impl MaintenanceStore {
    pub fn add_team(&mut self, data: CreateTeam) -> Team {
        let team = Team {
            id: generate_id("team"),
            name: data.name,
            description: data.description,
            color: data.color,
        };
        let created = team.clone();
        rewrite(&mut self.teams, |all| all.push(team));
        self.bump();
        created
    }

    /// Merge the given fields into a team; `None` if there is no such team
    pub fn update_team(&mut self, id: &str, data: &UpdateTeam) -> Option<Team> {
        let idx = self.teams.iter().position(|t| t.id == id)?;
        let updated = rewrite(&mut self.teams, |all| {
            let target = &mut all[idx];
            merge_fields!(target, data, [name, description, color]);
            target.clone()
        });
        self.bump();
        Some(updated)
    }

    pub fn team_by_id(&self, id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    /// Append a member. The team is not checked.
    pub fn add_team_member(&mut self, data: CreateTeamMember) -> TeamMember {
        let member = TeamMember {
            id: generate_id("user"),
            name: data.name,
            email: data.email,
            team_id: data.team_id,
            avatar: data.avatar,
            role: data.role,
        };
        let created = member.clone();
        rewrite(&mut self.team_members, |all| all.push(member));
        self.bump();
        created
    }

    pub fn team_member_by_id(&self, id: &str) -> Option<&TeamMember> {
        self.team_members.iter().find(|m| m.id == id)
    }

    pub fn team_members_for_team(&self, team_id: &str) -> Vec<TeamMember> {
        self.team_members
            .iter()
            .filter(|m| m.team_id == team_id)
            .cloned()
            .collect()
    }

    pub fn requests_for_team(&self, team_id: &str) -> Vec<MaintenanceRequest> {
        self.requests
            .iter()
            .filter(|r| r.team_id == team_id)
            .cloned()
            .collect()
    }
}
