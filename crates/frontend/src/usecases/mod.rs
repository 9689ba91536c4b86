pub mod u101_contact_form;
