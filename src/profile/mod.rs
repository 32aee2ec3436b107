pub mod repo;
pub mod vcard;

use crate::error::{QpError, QpResult};
use crate::origin::RequestOrigin;
use crate::qr::QrEncoder;
use crate::timestamp::Timestamp;
use crate::{ProfileId, System};

use entrait::*;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Profile {
    pub id: ProfileId,
    pub fullname: String,
    pub email: String,
    pub phone: String,
    pub instagram: String,
    pub linkedin: String,
    pub created_at: Timestamp,
}

/// Submitted form fields. Absent fields deserialize as empty strings.
#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ProfileForm {
    pub fullname: String,
    pub email: String,
    pub phone: String,
    pub instagram: String,
    pub linkedin: String,
}

impl ProfileForm {
    fn has_required_fields(&self) -> bool {
        !self.fullname.is_empty() && !self.email.is_empty()
    }
}

#[derive(Clone, Debug)]
pub struct CreatedProfile {
    pub profile: Profile,
    pub profile_url: String,
    pub qr_data_url: String,
}

#[entrait(pub CreateProfile)]
async fn create_profile(
    deps: &(impl System + repo::ProfileRepo + QrEncoder),
    origin: Option<RequestOrigin>,
    form: ProfileForm,
) -> QpResult<CreatedProfile> {
    if !form.has_required_fields() {
        return Err(QpError::MissingRequiredFields);
    }
    let origin = origin.ok_or(QpError::MissingHost)?;

    let profile = Profile {
        id: deps.new_profile_id(),
        fullname: form.fullname,
        email: form.email,
        phone: form.phone,
        instagram: form.instagram,
        linkedin: form.linkedin,
        created_at: Timestamp(deps.get_current_time()),
    };
    deps.insert_profile(profile.clone()).await?;
    tracing::info!(profile_id = %profile.id, "created profile");

    let profile_url = origin.profile_url(&profile.id);
    let qr_data_url = deps.encode_data_url(profile_url.clone()).await?;

    Ok(CreatedProfile {
        profile,
        profile_url,
        qr_data_url,
    })
}

#[entrait(pub FetchProfile)]
async fn fetch_profile(deps: &impl repo::ProfileRepo, id: ProfileId) -> QpResult<Profile> {
    deps.find_profile(id).await?.ok_or_else(|| {
        tracing::debug!(profile_id = %id, "profile not found");
        QpError::ProfileNotFound
    })
}

#[entrait(pub ExportVCard)]
async fn export_vcard(deps: &impl repo::ProfileRepo, id: ProfileId) -> QpResult<String> {
    let profile = fetch_profile(deps, id).await?;
    Ok(vcard::render(&profile))
}

#[cfg(test)]
mod tests {
    use super::repo::ProfileRepoMock;
    use super::*;
    use crate::qr::QrEncoderMock;
    use crate::test::{mock_system, test_profile_id};

    use assert_matches::*;
    use unimock::*;

    fn test_origin() -> RequestOrigin {
        RequestOrigin {
            scheme: "https".to_string(),
            host: "qr.example.com".to_string(),
        }
    }

    fn test_form() -> ProfileForm {
        ProfileForm {
            fullname: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            ..Default::default()
        }
    }

    fn stored_profile() -> Profile {
        Profile {
            id: test_profile_id(),
            fullname: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "".to_string(),
            instagram: "".to_string(),
            linkedin: "".to_string(),
            created_at: Timestamp(time::OffsetDateTime::UNIX_EPOCH),
        }
    }

    #[tokio::test]
    async fn test_create_profile() {
        let deps = Unimock::new((
            mock_system(),
            ProfileRepoMock::insert_profile
                .next_call(matching!(_))
                .answers(&|_, _| Ok(()))
                .once(),
            QrEncoderMock::encode_data_url
                .next_call(matching!(_))
                .answers(&|_, _| Ok("data:image/png;base64,iVBORw0KGgo=".to_string()))
                .once(),
        ));

        let created = create_profile(&deps, Some(test_origin()), test_form())
            .await
            .unwrap();

        assert_eq!(stored_profile(), created.profile);
        assert_eq!(
            "https://qr.example.com/p/20a626ba-c7d3-44c7-981a-e880f81c126f",
            created.profile_url
        );
        assert_eq!("data:image/png;base64,iVBORw0KGgo=", created.qr_data_url);
    }

    #[tokio::test]
    async fn create_without_required_fields_stores_nothing() {
        for form in [
            ProfileForm {
                email: "".to_string(),
                ..test_form()
            },
            ProfileForm {
                fullname: "".to_string(),
                ..test_form()
            },
            ProfileForm::default(),
        ] {
            // No clauses: any repo or encoder call would fail the test.
            let deps = Unimock::new(());

            assert_matches!(
                create_profile(&deps, Some(test_origin()), form).await,
                Err(QpError::MissingRequiredFields)
            );
        }
    }

    #[tokio::test]
    async fn fields_are_checked_before_origin() {
        let deps = Unimock::new(());

        assert_matches!(
            create_profile(&deps, None, ProfileForm::default()).await,
            Err(QpError::MissingRequiredFields)
        );
        assert_matches!(
            create_profile(&deps, None, test_form()).await,
            Err(QpError::MissingHost)
        );
    }

    #[tokio::test]
    async fn create_propagates_code_generation_timeout() {
        let deps = Unimock::new((
            mock_system(),
            ProfileRepoMock::insert_profile
                .next_call(matching!(_))
                .answers(&|_, _| Ok(()))
                .once(),
            QrEncoderMock::encode_data_url
                .next_call(matching!(_))
                .answers(&|_, _| {
                    Err(QpError::CodeGenerationTimeout(
                        std::time::Duration::from_millis(1),
                    ))
                })
                .once(),
        ));

        assert_matches!(
            create_profile(&deps, Some(test_origin()), test_form()).await,
            Err(QpError::CodeGenerationTimeout(_))
        );
    }

    #[tokio::test]
    async fn fetch_unknown_profile_is_not_found() {
        let deps = Unimock::new(
            ProfileRepoMock::find_profile
                .next_call(matching!(_))
                .answers(&|_, _| Ok(None))
                .once(),
        );

        assert_matches!(
            fetch_profile(&deps, test_profile_id()).await,
            Err(QpError::ProfileNotFound)
        );
    }

    #[tokio::test]
    async fn export_renders_stored_profile() {
        let deps = Unimock::new(
            ProfileRepoMock::find_profile
                .next_call(matching!(_))
                .answers(&|_, _| Ok(Some(stored_profile())))
                .once(),
        );

        let card = export_vcard(&deps, test_profile_id()).await.unwrap();

        assert!(card.starts_with("BEGIN:VCARD\r\n"));
        assert!(card.contains("FN:Ada Lovelace\r\n"));
    }
}
