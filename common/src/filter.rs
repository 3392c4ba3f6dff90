use crate::purchase_request::{PurchaseRequest, RequestStatus};

/// Client-side view over the fetched request list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Fulfilled,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [
        StatusFilter::All,
        StatusFilter::Pending,
        StatusFilter::Fulfilled,
    ];

    pub fn matches(self, status: RequestStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => status == RequestStatus::Pending,
            StatusFilter::Fulfilled => status == RequestStatus::Fulfilled,
        }
    }

    /// Requests passing the filter, in server order.
    pub fn apply(self, requests: &[PurchaseRequest]) -> Vec<&PurchaseRequest> {
        requests.iter().filter(|r| self.matches(r.status)).collect()
    }

    /// Filter button text.
    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All Requests",
            StatusFilter::Pending => "Pending",
            StatusFilter::Fulfilled => "Fulfilled",
        }
    }

    /// Message shown when nothing passes the filter.
    pub fn empty_message(self) -> String {
        match self {
            StatusFilter::All => "There are currently no requests available".to_string(),
            StatusFilter::Pending | StatusFilter::Fulfilled => {
                format!(
                    "There are currently no {} requests available",
                    self.label().to_lowercase()
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::purchase_request::PurchaseRequestId;

    fn request(id: &str, status: RequestStatus) -> PurchaseRequest {
        PurchaseRequest {
            id: PurchaseRequestId(id.into()),
            crop_type: "Wheat".into(),
            quantity: 10.0,
            status,
            farmer_username: "ravi".into(),
            middleman_username: None,
            request_date: String::new(),
            price: 20.0,
        }
    }

    #[test]
    fn all_keeps_everything_in_order() {
        let list = vec![
            request("3", RequestStatus::Fulfilled),
            request("1", RequestStatus::Pending),
            request("2", RequestStatus::Pending),
        ];
        let ids: Vec<_> = StatusFilter::All
            .apply(&list)
            .iter()
            .map(|r| r.id.0.as_str())
            .collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn pending_and_fulfilled_partition_the_list() {
        let list = vec![
            request("1", RequestStatus::Pending),
            request("2", RequestStatus::Fulfilled),
            request("3", RequestStatus::Pending),
        ];
        let pending = StatusFilter::Pending.apply(&list);
        let fulfilled = StatusFilter::Fulfilled.apply(&list);
        assert_eq!(pending.len(), 2);
        assert_eq!(fulfilled.len(), 1);
        assert_eq!(pending.len() + fulfilled.len(), list.len());
        assert!(pending.iter().all(|r| r.status == RequestStatus::Pending));
        assert_eq!(fulfilled[0].id.0, "2");
    }

    #[test]
    fn empty_messages() {
        assert_eq!(
            StatusFilter::All.empty_message(),
            "There are currently no requests available"
        );
        assert_eq!(
            StatusFilter::Fulfilled.empty_message(),
            "There are currently no fulfilled requests available"
        );
        assert_eq!(
            StatusFilter::Pending.empty_message(),
            "There are currently no pending requests available"
        );
    }

    #[test]
    fn default_is_all() {
        assert_eq!(StatusFilter::default(), StatusFilter::All);
    }
}
