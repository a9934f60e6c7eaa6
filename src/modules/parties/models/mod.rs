mod party_profile;

pub use party_profile::PartyProfile;
