use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident => $label:literal,)+ }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownOption;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    other => Err(UnknownOption {
                        kind: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnknownOption {
    pub kind: &'static str,
    pub value: String,
}

impl Display for UnknownOption {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown {} option {:?}", self.kind, self.value)
    }
}

impl std::error::Error for UnknownOption {}

labeled_enum! {
    pub enum Role {
        Homeowner => "Homeowner/Residential Property Owner",
        RealEstate => "Real Estate Sales / Brokerage",
        PropertyManagement => "Property Management",
        GeneralContractor => "General Contractor / Builder",
        CommercialOwner => "Commercial Property Owner / Landlord",
        FacilityServices => "Maintenance or Facility Services",
        HomeownersAssociation => "HOA / Condominium Association",
        PublicAgency => "Government or Public Agency",
        DesignProfessional => "Architect / Engineer / Design Professional",
        PreservationSpecialist => "Historic Preservation / Restoration Specialist",
        SiteVisitContact => "Site Visit Contact",
        Other => "Other",
    }
}

impl Role {
    pub fn is_professional(&self) -> bool {
        !matches!(self, Role::Homeowner | Role::Other | Role::SiteVisitContact)
    }
}

labeled_enum! {
    pub enum Industry {
        RealEstate => "Real Estate Sales / Brokerage",
        PropertyManagement => "Property Management",
        GeneralContractor => "General Contractor / Builder",
        CommercialOwner => "Commercial Property Owner / Landlord",
        FacilityServices => "Maintenance or Facility Services",
        HomeownersAssociation => "HOA / Condominium Association",
        PublicAgency => "Government or Public Agency",
        DesignProfessional => "Architect / Engineer / Design Professional",
        PreservationSpecialist => "Historic Preservation / Restoration Specialist",
        Other => "Other",
    }
}

labeled_enum! {
    pub enum ContactChannel {
        Email => "Email",
        Text => "Text",
        Call => "Call",
    }
}

labeled_enum! {
    pub enum YesNo {
        Yes => "Yes",
        No => "No",
    }
}

labeled_enum! {
    pub enum Attendance {
        SelfPresent => "Me",
        DelegatePresent => "SomeoneElse",
        NoOnePresent => "Nobody",
    }
}

labeled_enum! {
    pub enum UsState {
        Alabama => "Alabama",
        Alaska => "Alaska",
        Arizona => "Arizona",
        Arkansas => "Arkansas",
        California => "California",
        Colorado => "Colorado",
        Connecticut => "Connecticut",
        Delaware => "Delaware",
        Florida => "Florida",
        Georgia => "Georgia",
        Hawaii => "Hawaii",
        Idaho => "Idaho",
        Illinois => "Illinois",
        Indiana => "Indiana",
        Iowa => "Iowa",
        Kansas => "Kansas",
        Kentucky => "Kentucky",
        Louisiana => "Louisiana",
        Maine => "Maine",
        Maryland => "Maryland",
        Massachusetts => "Massachusetts",
        Michigan => "Michigan",
        Minnesota => "Minnesota",
        Mississippi => "Mississippi",
        Missouri => "Missouri",
        Montana => "Montana",
        Nebraska => "Nebraska",
        Nevada => "Nevada",
        NewHampshire => "New Hampshire",
        NewJersey => "New Jersey",
        NewMexico => "New Mexico",
        NewYork => "New York",
        NorthCarolina => "North Carolina",
        NorthDakota => "North Dakota",
        Ohio => "Ohio",
        Oklahoma => "Oklahoma",
        Oregon => "Oregon",
        Pennsylvania => "Pennsylvania",
        RhodeIsland => "Rhode Island",
        SouthCarolina => "South Carolina",
        SouthDakota => "South Dakota",
        Tennessee => "Tennessee",
        Texas => "Texas",
        Utah => "Utah",
        Vermont => "Vermont",
        Virginia => "Virginia",
        Washington => "Washington",
        WestVirginia => "West Virginia",
        Wisconsin => "Wisconsin",
        Wyoming => "Wyoming",
    }
}

impl Default for UsState {
    fn default() -> Self {
        UsState::Idaho
    }
}
