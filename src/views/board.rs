//! Kanban board: requests grouped by status

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{MaintenanceRequest, RequestStatus};

/// One board column
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BoardColumn {
    pub status: RequestStatus,
    pub title: String,
    pub count: usize,
    pub requests: Vec<MaintenanceRequest>,
}

/// Four columns, in `RequestStatus::ALL` order
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StatusBoard {
    pub columns: Vec<BoardColumn>,
}

impl StatusBoard {
    /// Column for `status`; `None` only for a board not built by `group_by_status`
    pub fn column(&self, status: RequestStatus) -> Option<&BoardColumn> {
        self.columns.iter().find(|c| c.status == status)
    }

    pub fn total(&self) -> usize {
        self.columns.iter().map(|c| c.count).sum()
    }
}

/// Partition requests into the four status columns, keeping input order inside each
pub fn group_by_status<'a, I>(requests: I) -> StatusBoard
where
    I: IntoIterator<Item = &'a MaintenanceRequest>,
{
    let mut columns: Vec<BoardColumn> = RequestStatus::ALL
        .iter()
        .map(|status| BoardColumn {
            status: *status,
            title: status.title().to_string(),
            count: 0,
            requests: Vec::new(),
        })
        .collect();

    for request in requests {
        if let Some(column) = columns.iter_mut().find(|c| c.status == request.status) {
            column.requests.push(request.clone());
            column.count += 1;
        }
    }

    StatusBoard { columns }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::*;

    #[test]
    fn test_partition_is_complete_and_disjoint() {
        let mut store = store_with_team();
        let statuses = [
            RequestStatus::Scrap,
            RequestStatus::New,
            RequestStatus::Repaired,
            RequestStatus::New,
            RequestStatus::InProgress,
            RequestStatus::New,
            RequestStatus::Repaired,
        ];
        for status in statuses {
            let mut data = jam("equip-1", "T1");
            data.status = status;
            store.add_request(data);
        }

        let requests = store.requests();
        let board = group_by_status(requests.iter());

        assert_eq!(board.columns.len(), 4);
        assert_eq!(board.total(), statuses.len());
        assert_eq!(board.column(RequestStatus::New).map(|c| c.count), Some(3));
        assert_eq!(board.column(RequestStatus::InProgress).map(|c| c.count), Some(1));
        assert_eq!(board.column(RequestStatus::Repaired).map(|c| c.count), Some(2));
        assert_eq!(board.column(RequestStatus::Scrap).map(|c| c.count), Some(1));

        for column in &board.columns {
            assert!(column.requests.iter().all(|r| r.status == column.status));
        }
        let mut ids: Vec<_> = board
            .columns
            .iter()
            .flat_map(|c| c.requests.iter().map(|r| r.id.clone()))
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), statuses.len());
    }

    #[test]
    fn test_column_keeps_input_order() {
        let mut store = store_with_team();
        let first = store.add_request(jam("equip-1", "T1"));
        let second = store.add_request(jam("equip-2", "T1"));

        let requests = store.requests();
        let board = group_by_status(requests.iter());
        let ids: Vec<_> = board
            .column(RequestStatus::New)
            .into_iter()
            .flat_map(|c| c.requests.iter())
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec![first.id.as_str(), second.id.as_str()]);
    }

    #[test]
    fn test_missing_column_is_none() {
        let board = StatusBoard {
            columns: vec![BoardColumn {
                status: RequestStatus::New,
                title: RequestStatus::New.title().to_string(),
                count: 0,
                requests: Vec::new(),
            }],
        };
        assert!(board.column(RequestStatus::New).is_some());
        assert!(board.column(RequestStatus::Scrap).is_none());
    }

    #[test]
    fn test_empty_board_has_four_empty_columns() {
        let board = group_by_status(std::iter::empty());
        let titles: Vec<_> = board.columns.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["New", "In Progress", "Repaired", "Scrap"]);
        assert_eq!(board.total(), 0);
    }
}
