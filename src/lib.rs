pub mod configuration;

pub mod export {
    pub mod exporterror;
    pub mod exportfilename;
    pub mod icalendar;
    pub mod pdftable;
}

pub mod holiday {
    pub mod holidayerror;
    pub mod holidaycategory;
    pub mod holiday;
    pub mod holidayset;
    pub mod holidaycalculator;
    pub mod holidayruleloader;
}

pub mod selection {
    pub mod selectionstate;
    pub mod displaycategory;
    pub mod dayview;
    pub mod plannersession;
}

pub mod time {
    pub mod utility;
    pub mod rangeofdates;
    pub mod year;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod fixeddateholiday;
        pub mod easterrelatedholiday;
    }
}
