use super::*;

/// An untagged event of the metadata location being repointed.
#[derive(Debug, Serialize, SchemaType)]
pub struct SetBaseUrlEvent {
    /// Previous metadata location prefix.
    pub from: String,
    /// New metadata location prefix.
    pub to: String,
}

/// Tagged custom event to be serialized for the event log.
#[derive(Debug)]
pub enum CustomEvent {
    /// Repointing the metadata location.
    SetBaseUrl(SetBaseUrlEvent),
}

impl Serial for CustomEvent {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            CustomEvent::SetBaseUrl(event) => {
                out.write_u8(SET_BASE_URL_TAG)?;
                event.serial(out)
            }
        }
    }
}

impl Deserial for CustomEvent {
    fn deserial<R: Read>(source: &mut R) -> ParseResult<Self> {
        let tag = source.read_u8()?;
        match tag {
            SET_BASE_URL_TAG => SetBaseUrlEvent::deserial(source).map(CustomEvent::SetBaseUrl),
            _ => Err(ParseError::default()),
        }
    }
}
