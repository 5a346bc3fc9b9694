mod test_foreign_priority;
