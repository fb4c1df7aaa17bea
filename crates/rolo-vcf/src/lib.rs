//! vCard (VCF) toolkit: scanning, lenient contact-field extraction, and
//! minimal serialization.

pub mod vcf;
