//! Leagues and their members.

use serde::{Deserialize, Serialize};

use crate::core::{LeagueId, UserId};

/// One manager's entry in a league.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueMember {
    pub user: UserId,
    pub team_name: String,
    pub manager_name: String,
    /// Points from the latest recorded round.
    pub round_points: i32,
    pub total_points: i32,
    /// Position at the last ranking, 1-based.
    pub rank: u32,
}

impl LeagueMember {
    /// A fresh member with zero points.
    #[must_use]
    pub fn new(user: UserId, team_name: impl Into<String>, manager_name: impl Into<String>) -> Self {
        Self {
            user,
            team_name: team_name.into(),
            manager_name: manager_name.into(),
            round_points: 0,
            total_points: 0,
            rank: 0,
        }
    }

    /// Set starting points (builder pattern).
    #[must_use]
    pub fn with_points(mut self, round_points: i32, total_points: i32) -> Self {
        self.round_points = round_points;
        self.total_points = total_points;
        self
    }
}

/// A private or public league.
///
/// Members keep their insertion order; a user appears at most once.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct League {
    pub id: LeagueId,
    pub name: String,
    /// Join code shared between managers.
    pub code: String,
    members: Vec<LeagueMember>,
}

impl League {
    #[must_use]
    pub fn new(id: LeagueId, name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            code: code.into(),
            members: Vec::new(),
        }
    }

    /// Members in join order.
    #[must_use]
    pub fn members(&self) -> &[LeagueMember] {
        &self.members
    }

    #[must_use]
    pub fn member(&self, user: &UserId) -> Option<&LeagueMember> {
        self.members.iter().find(|m| &m.user == user)
    }

    #[must_use]
    pub fn has_member(&self, user: &UserId) -> bool {
        self.member(user).is_some()
    }

    /// Add a member unless the user is already in the league.
    ///
    /// Returns whether the member was added.
    pub fn add_member(&mut self, member: LeagueMember) -> bool {
        if self.has_member(&member.user) {
            return false;
        }
        self.members.push(member);
        self.rerank();
        true
    }

    /// Record a round for a member. Returns `false` if the user is not a member.
    pub fn record_points(&mut self, user: &UserId, round_points: i32) -> bool {
        let Some(member) = self.members.iter_mut().find(|m| &m.user == user) else {
            return false;
        };
        member.round_points = round_points;
        member.total_points += round_points;
        self.rerank();
        true
    }

    /// Members ordered by total points, highest first, with ranks filled in.
    ///
    /// Ties keep join order.
    #[must_use]
    pub fn standings(&self) -> Vec<LeagueMember> {
        let mut table = self.members.clone();
        table.sort_by(|a, b| b.total_points.cmp(&a.total_points));
        for (i, member) in table.iter_mut().enumerate() {
            member.rank = rank_at(i);
        }
        table
    }

    /// Refresh the stored rank of every member.
    fn rerank(&mut self) {
        let mut order: Vec<usize> = (0..self.members.len()).collect();
        order.sort_by(|&a, &b| self.members[b].total_points.cmp(&self.members[a].total_points));
        for (i, idx) in order.into_iter().enumerate() {
            self.members[idx].rank = rank_at(i);
        }
    }
}

fn rank_at(index: usize) -> u32 {
    u32::try_from(index + 1).unwrap_or(u32::MAX)
}
