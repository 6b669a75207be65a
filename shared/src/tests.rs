#[cfg(test)]
mod tests {
    use crate::models::{CastVoteRequest, MessageResponse, VoteOption, VoteRecord};
    use crate::tally::Tally;
    use crate::validation::{validate_cast_vote, ValidationError};

    fn request(vote: Option<&str>, session: Option<&str>) -> CastVoteRequest {
        CastVoteRequest {
            vote: vote.map(String::from),
            session_id: session.map(String::from),
        }
    }

    #[test]
    fn test_option_parsing() {
        assert_eq!("no".parse::<VoteOption>(), Ok(VoteOption::No));
        assert_eq!("aws".parse::<VoteOption>(), Ok(VoteOption::Aws));
        assert_eq!("other".parse::<VoteOption>(), Ok(VoteOption::Other));

        assert_eq!(
            "AWS".parse::<VoteOption>(),
            Err(ValidationError::InvalidOption("AWS".into()))
        );
        assert!("".parse::<VoteOption>().is_err());
        assert!("gcp".parse::<VoteOption>().is_err());

        for option in VoteOption::ALL {
            assert_eq!(option.to_string().parse::<VoteOption>(), Ok(option));
        }
    }

    #[test]
    fn test_option_wire_names() {
        assert_eq!(serde_json::to_string(&VoteOption::Aws).unwrap(), "\"aws\"");
        assert_eq!(serde_json::from_str::<VoteOption>("\"other\"").unwrap(), VoteOption::Other);
        assert!(serde_json::from_str::<VoteOption>("\"Other\"").is_err());
    }

    #[test]
    fn test_request_validation() {
        assert_eq!(validate_cast_vote(&request(Some("aws"), Some("s-1"))), Ok(VoteOption::Aws));

        assert_eq!(
            validate_cast_vote(&request(None, Some("s-1"))),
            Err(ValidationError::MissingOption)
        );
        assert_eq!(
            validate_cast_vote(&request(Some("azure"), Some("s-1"))),
            Err(ValidationError::InvalidOption("azure".into()))
        );
        assert_eq!(
            validate_cast_vote(&request(Some("aws"), None)),
            Err(ValidationError::MissingSession)
        );
        assert_eq!(
            validate_cast_vote(&request(Some("aws"), Some(""))),
            Err(ValidationError::MissingSession)
        );
        assert_eq!(validate_cast_vote(&request(Some("aws"), Some("   "))), Ok(VoteOption::Aws));
    }

    #[test]
    fn test_request_wire_format() {
        let parsed: CastVoteRequest =
            serde_json::from_str(r#"{"vote":"no","sessionId":"abc"}"#).unwrap();
        assert_eq!(parsed.vote.as_deref(), Some("no"));
        assert_eq!(parsed.session_id.as_deref(), Some("abc"));

        let empty: CastVoteRequest = serde_json::from_str("{}").unwrap();
        assert!(empty.vote.is_none() && empty.session_id.is_none());
    }

    #[test]
    fn test_tally_counts() {
        let tally: Tally = [VoteOption::Aws, VoteOption::Aws, VoteOption::No]
            .into_iter()
            .collect();

        assert_eq!(tally.count(VoteOption::Aws), 2);
        assert_eq!(tally.count(VoteOption::No), 1);
        assert_eq!(tally.count(VoteOption::Other), 0);
        assert_eq!(tally.total(), 3);
        assert_eq!(serde_json::to_string(&tally).unwrap(), r#"{"no":1,"aws":2}"#);
    }

    #[test]
    fn test_empty_tally_omits_options() {
        let tally = Tally::new();
        assert!(tally.is_empty());
        assert_eq!(tally.total(), 0);
        assert_eq!(serde_json::to_string(&tally).unwrap(), "{}");
    }

    #[test]
    fn test_single_vote_only_moves_its_option() {
        for option in VoteOption::ALL {
            let mut tally: Tally = VoteOption::ALL.into_iter().collect();
            let before = tally.clone();
            tally.record(option);

            for other in VoteOption::ALL {
                let expected = before.count(other) + u64::from(other == option);
                assert_eq!(tally.count(other), expected);
            }
        }
    }

    #[test]
    fn test_records_get_distinct_ids() {
        let a = VoteRecord::new(VoteOption::No, "same-session");
        let b = VoteRecord::new(VoteOption::No, "same-session");
        assert_ne!(a.id, b.id);
        assert_eq!(a.session_id, b.session_id);
    }

    #[test]
    fn test_message_bodies() {
        assert_eq!(
            serde_json::to_string(&MessageResponse::ack("ok")).unwrap(),
            r#"{"message":"ok"}"#
        );
        assert_eq!(
            serde_json::to_string(&MessageResponse::error(400, "bad")).unwrap(),
            r#"{"message":"bad","status":400}"#
        );
    }
}
